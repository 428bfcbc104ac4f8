#[cfg(test)]
pub mod test {
    use std::cell::RefCell;
    use std::env;
    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;

    use crate::report::Reporter;

    /// Records every warning; clones share the same log.
    #[derive(Debug, Default, Clone)]
    pub struct CollectingReporter {
        warnings: Rc<RefCell<Vec<String>>>,
    }

    impl CollectingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.warnings.borrow().clone()
        }
    }

    impl Reporter for CollectingReporter {
        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    /// Write `(relative path, contents)` pairs under `root`, creating parents.
    pub fn seed(root: &Path, files: &[(&str, &str)]) {
        for (rel, contents) in files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }
    }

    /// Sets or removes an environment variable, restoring it on drop.
    ///
    /// Tests using this must be `#[serial]`.
    pub struct EnvGuard {
        key: &'static str,
        original: Option<OsString>,
    }

    impl EnvGuard {
        pub fn set(key: &'static str, value: &str) -> Self {
            let original = env::var_os(key);
            // SAFETY: callers are serialized with `#[serial]`.
            unsafe { env::set_var(key, value) };
            Self { key, original }
        }

        pub fn unset(key: &'static str) -> Self {
            let original = env::var_os(key);
            // SAFETY: callers are serialized with `#[serial]`.
            unsafe { env::remove_var(key) };
            Self { key, original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: callers are serialized with `#[serial]`.
            match &self.original {
                Some(value) => unsafe { env::set_var(self.key, value) },
                None => unsafe { env::remove_var(self.key) },
            }
        }
    }

    #[test]
    fn collecting_reporter_clones_share_log() {
        let reporter = CollectingReporter::new();
        let handle = reporter.clone();
        reporter.warn("one");
        handle.warn("two");
        assert_eq!(reporter.warnings(), vec!["one", "two"]);
    }
}
