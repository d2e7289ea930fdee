use core::fmt;

/// Identifier of a named dataset retained by the plotting program.
///
/// Ids are handed out by a plot's counter starting at 0 and are never reused
/// within that plot. The program sees the dataset as `$_<id>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataId(u32);

impl DataId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// The id following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for DataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataId({})", self.0)
    }
}

/// Renders the datablock name, e.g. `$_3`.
impl fmt::Display for DataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_id_renders_as_datablock() {
        assert_eq!(DataId::new(0).to_string(), "$_0");
        assert_eq!(DataId::new(42).to_string(), "$_42");
    }

    #[test]
    fn next_is_monotonic() {
        let id = DataId::new(7);
        assert_eq!(id.next().index(), 8);
        assert!(id.next() > id);
    }
}
