//! C++ runtime emitted at the top of every generated program
//!
//! `MolObject` is the dynamic value: absent, `int`, `std::string` or `bool`.
//! Operator support mirrors [`crate::interpreter::ops`]:
//!
//! | op           | int,int | text,text | text,int |
//! |--------------|---------|-----------|----------|
//! | `+`          | yes     | concat    |          |
//! | `*`          | yes     |           | repeat   |
//! | `<` / `<=`   | yes     |           |          |
//! | `==`         | yes     | yes       | false    |
//!
//! Everything else throws `MolRuntimeError`, except `==`, which yields `false`.

/// Entry point wrapper: the statements go between `MAIN_PROLOGUE` and `MAIN_EPILOGUE`.
pub const MAIN_PROLOGUE: &str = "int main() {\n    try {\n";

pub const MAIN_EPILOGUE: &str = r#"    } catch (const MolRuntimeError& e) {
        std::cout.flush();
        std::cerr << "runtime error: " << e.what() << std::endl;
        return 1;
    }
    return 0;
}
"#;

pub const RUNTIME_PREAMBLE: &str = r#"#include <iostream>
#include <stdexcept>
#include <string>
#include <variant>

// Raised by the generated program for operations Mollang does not define.
struct MolRuntimeError : std::runtime_error {
    using std::runtime_error::runtime_error;
};

// Dynamic value: absent, integer, text or boolean.
struct MolObject {
    std::variant<std::monostate, int, std::string, bool> value;

    MolObject() : value(std::monostate{}) {}
    MolObject(int v) : value(v) {}
    MolObject(const std::string& v) : value(v) {}
    MolObject(const char* v) : value(std::string(v)) {}
    MolObject(bool v) : value(v) {}

    bool is_int() const { return std::holds_alternative<int>(value); }
    bool is_text() const { return std::holds_alternative<std::string>(value); }
    bool is_bool() const { return std::holds_alternative<bool>(value); }
};

MolObject operator+(const MolObject& a, const MolObject& b) {
    if (a.is_int() && b.is_int()) {
        int result;
        if (__builtin_add_overflow(std::get<int>(a.value), std::get<int>(b.value), &result)) {
            throw MolRuntimeError("integer overflow in +");
        }
        return MolObject(result);
    }
    if (a.is_text() && b.is_text()) {
        return MolObject(std::get<std::string>(a.value) + std::get<std::string>(b.value));
    }
    throw MolRuntimeError("unsupported operand types for +");
}

MolObject operator*(const MolObject& a, const MolObject& b) {
    if (a.is_text() && b.is_int()) {
        std::string s;
        for (int i = 0; i < std::get<int>(b.value); ++i) {
            s += std::get<std::string>(a.value);
        }
        return MolObject(s);
    }
    if (a.is_int() && b.is_int()) {
        int result;
        if (__builtin_mul_overflow(std::get<int>(a.value), std::get<int>(b.value), &result)) {
            throw MolRuntimeError("integer overflow in *");
        }
        return MolObject(result);
    }
    throw MolRuntimeError("unsupported operand types for *");
}

MolObject operator<(const MolObject& a, const MolObject& b) {
    if (a.is_int() && b.is_int()) {
        return MolObject(std::get<int>(a.value) < std::get<int>(b.value));
    }
    throw MolRuntimeError("unsupported operand types for <");
}

MolObject operator<=(const MolObject& a, const MolObject& b) {
    if (a.is_int() && b.is_int()) {
        return MolObject(std::get<int>(a.value) <= std::get<int>(b.value));
    }
    throw MolRuntimeError("unsupported operand types for <=");
}

MolObject operator==(const MolObject& a, const MolObject& b) {
    if (a.is_int() && b.is_int()) {
        return MolObject(std::get<int>(a.value) == std::get<int>(b.value));
    }
    if (a.is_text() && b.is_text()) {
        return MolObject(std::get<std::string>(a.value) == std::get<std::string>(b.value));
    }
    return MolObject(false);
}

// Condition of an if/while: only a boolean is accepted.
bool mollang_truth(const MolObject& obj) {
    if (!obj.is_bool()) {
        throw MolRuntimeError("condition is not a boolean");
    }
    return std::get<bool>(obj.value);
}

void mollang_print(const MolObject& obj) {
    if (obj.is_int()) {
        std::cout << std::get<int>(obj.value);
    } else if (obj.is_text()) {
        std::cout << std::get<std::string>(obj.value);
    } else if (obj.is_bool()) {
        std::cout << (std::get<bool>(obj.value) ? "true" : "false");
    }
    std::cout << std::endl;
}

MolObject mollang_input() {
    std::string line;
    std::getline(std::cin, line);
    try {
        std::size_t consumed = 0;
        int v = std::stoi(line, &consumed);
        if (consumed == line.size()) {
            return MolObject(v);
        }
    } catch (const std::exception&) {
    }
    return MolObject(line);
}
"#;
