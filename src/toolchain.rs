//! Native build step
//!
//! Turns `prog.mol` into `prog.cpp` next to it, then runs the C++ compiler to
//! produce the executable `prog`. The compiler is started directly, never
//! through a shell, so file names need no quoting.

use crate::compiler::{translate, CompileError};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

pub const SOURCE_EXTENSION: &str = "mol";
pub const DEFAULT_CXX: &str = "g++";
pub const DEFAULT_STD: &str = "c++17";

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("input file '{}' must have a .mol extension", .0.display())]
    BadExtension(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("failed to start C++ compiler '{cxx}': {source}")]
    CompilerNotFound { cxx: String, source: io::Error },

    #[error("C++ compiler '{cxx}' failed ({status})")]
    CompilerFailed { cxx: String, status: String },
}

/// Where the generated source and the executable go for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub source: PathBuf,
    pub cpp: PathBuf,
    pub executable: PathBuf,
}

impl ArtifactPaths {
    /// Derive `<stem>.cpp` and `<stem>` from a `<stem>.mol` path.
    pub fn for_source(source: &Path) -> Result<Self, ToolchainError> {
        if source.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            return Err(ToolchainError::BadExtension(source.to_path_buf()));
        }

        Ok(Self {
            source: source.to_path_buf(),
            cpp: source.with_extension("cpp"),
            executable: source.with_extension(""),
        })
    }
}

/// A C++ compiler command and language standard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub cxx: String,
    pub std: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cxx: DEFAULT_CXX.to_string(),
            std: DEFAULT_STD.to_string(),
        }
    }
}

impl Toolchain {
    pub fn new(cxx: impl Into<String>, std: impl Into<String>) -> Self {
        Self {
            cxx: cxx.into(),
            std: std.into(),
        }
    }

    /// The compiler invocation, without running it
    pub fn command(&self, paths: &ArtifactPaths) -> Command {
        let mut cmd = Command::new(&self.cxx);
        cmd.arg(format!("-std={}", self.std))
            .arg("-o")
            .arg(&paths.executable)
            .arg(&paths.cpp);
        cmd
    }

    /// Compile an already written `.cpp` file.
    pub fn compile(&self, paths: &ArtifactPaths) -> Result<(), ToolchainError> {
        let mut cmd = self.command(paths);
        debug!("running {:?}", cmd);

        let status = cmd.status().map_err(|source| ToolchainError::CompilerNotFound {
            cxx: self.cxx.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ToolchainError::CompilerFailed {
                cxx: self.cxx.clone(),
                status: status.to_string(),
            });
        }

        info!("built {}", paths.executable.display());
        Ok(())
    }
}

/// Translate `source` and write the C++ file, returning the artifact paths.
pub fn emit_cpp(source: &Path) -> Result<ArtifactPaths, ToolchainError> {
    let paths = ArtifactPaths::for_source(source)?;
    emit_cpp_to(source, &paths.cpp)?;
    Ok(paths)
}

/// Translate `source` and write the C++ code to `out`.
pub fn emit_cpp_to(source: &Path, out: &Path) -> Result<(), ToolchainError> {
    let text = fs::read_to_string(source).map_err(|e| ToolchainError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let code = translate(&text)?;
    fs::write(out, code).map_err(|e| ToolchainError::Write {
        path: out.to_path_buf(),
        source: e,
    })?;

    info!("wrote {}", out.display());
    Ok(())
}

/// Full build: translate, write the C++ file, then compile it.
pub fn build(source: &Path, toolchain: &Toolchain) -> Result<ArtifactPaths, ToolchainError> {
    let paths = emit_cpp(source)?;
    toolchain.compile(&paths)?;
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_paths() {
        let paths = ArtifactPaths::for_source(Path::new("demo/hello.mol")).unwrap();
        assert_eq!(paths.cpp, PathBuf::from("demo/hello.cpp"));
        assert_eq!(paths.executable, PathBuf::from("demo/hello"));
    }

    #[test]
    fn test_extension_required() {
        for bad in ["hello.txt", "hello", "hello.mol.bak"] {
            assert!(matches!(
                ArtifactPaths::for_source(Path::new(bad)),
                Err(ToolchainError::BadExtension(_))
            ));
        }
    }

    #[test]
    fn test_command_line() {
        let paths = ArtifactPaths::for_source(Path::new("a.mol")).unwrap();
        let cmd = Toolchain::new("clang++", "c++20").command(&paths);

        assert_eq!(cmd.get_program().to_string_lossy(), "clang++");
        let args: Vec<String> = cmd
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-std=c++20", "-o", "a", "a.cpp"]);
    }

    #[test]
    fn test_emit_writes_cpp_next_to_source() {
        let tmpdir = tempfile::tempdir().unwrap();
        let source = tmpdir.path().join("count.mol");
        fs::write(&source, "밥 은 1\n스크럼 밥").unwrap();

        let paths = emit_cpp(&source).unwrap();
        let code = fs::read_to_string(&paths.cpp).unwrap();
        assert!(code.contains("var_0 = MolObject(1);"));
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let tmpdir = tempfile::tempdir().unwrap();
        let source = tmpdir.path().join("broken.mol");
        fs::write(&source, "입 밥 [").unwrap();

        assert!(matches!(emit_cpp(&source), Err(ToolchainError::Compile(_))));
        assert!(!tmpdir.path().join("broken.cpp").exists());
    }

    #[test]
    fn test_missing_compiler() {
        let paths = ArtifactPaths::for_source(Path::new("nothing.mol")).unwrap();
        let toolchain = Toolchain::new("mollang-no-such-compiler", DEFAULT_STD);
        assert!(matches!(
            toolchain.compile(&paths),
            Err(ToolchainError::CompilerNotFound { .. })
        ));
    }
}
