//! Filesystem path validators.
//!
//! These hit the filesystem at validate time (`Path::exists` and friends),
//! so results depend on the environment, not only on the value.

use std::path::Path;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a path exists.
    pub Exists for Path;
    rule(input) { input.exists() }
    error(input) {
        ValidationError::formatted("exists", "path {} does not exist", &[&input.display()])
    }
    fn exists();
}

crate::validator! {
    /// Validates that a path is an existing regular file.
    pub IsFile for Path;
    rule(input) { input.is_file() }
    error(input) {
        ValidationError::formatted("is_file", "path {} is not a file", &[&input.display()])
    }
    fn is_file();
}

crate::validator! {
    /// Validates that a path is an existing directory.
    pub IsDir for Path;
    rule(input) { input.is_dir() }
    error(input) {
        ValidationError::formatted("is_dir", "path {} is not a directory", &[&input.display()])
    }
    fn is_dir();
}

crate::validator! {
    /// Validates that a path has a given extension (without the dot).
    pub HasExtension { ext: String } for Path;
    rule(self, input) { input.extension().is_some_and(|e| e == self.ext.as_str()) }
    error(self, input) {
        ValidationError::formatted(
            "has_extension",
            "path {} must have extension %s",
            &[&input.display(), &self.ext],
        )
        .with_param("expected", self.ext.clone())
    }
    new(ext: impl Into<String>) { Self { ext: ext.into() } }
    fn has_extension(ext: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use std::path::PathBuf;

    fn missing_path() -> PathBuf {
        std::env::temp_dir().join("preflight-definitely-missing-5c1a")
    }

    #[test]
    fn exists_on_temp_dir() {
        assert!(exists().validate(&std::env::temp_dir()).is_ok());
        assert!(exists().validate(&missing_path()).is_err());
    }

    #[test]
    fn is_dir_on_temp_dir() {
        assert!(is_dir().validate(&std::env::temp_dir()).is_ok());
        assert!(is_dir().validate(&missing_path()).is_err());
    }

    #[test]
    fn is_file_rejects_directory() {
        assert!(is_file().validate(&std::env::temp_dir()).is_err());
    }

    #[test]
    fn has_extension_cases() {
        let validator = has_extension("rs");
        assert!(validator.validate(Path::new("src/main.rs")).is_ok());
        assert!(validator.validate(Path::new("src/main.go")).is_err());
        assert!(validator.validate(Path::new("src/main")).is_err());
    }

    #[test]
    fn missing_path_error_names_the_path() {
        let err = exists().validate(&missing_path()).unwrap_err();
        assert!(err.message.contains("preflight-definitely-missing"));
    }
}
