#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertViewer {
    open: bool,
    source: Option<String>,
}

impl CertViewer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn open(&mut self, path: &str) -> bool {
        let path = path.trim();
        if path.is_empty() {
            return false;
        }

        let changed = !self.open || self.source.as_deref() != Some(path);
        self.open = true;
        self.source = Some(path.to_string());
        changed
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    // No-op once the modal has reopened.
    pub fn clear_source(&mut self) -> bool {
        if self.open || self.source.is_none() {
            return false;
        }

        self.source = None;
        true
    }
}
