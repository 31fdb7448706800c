//! Read-only observations about the invoking channel.

/// Facts about the channel a command was issued from, snapshotted once per
/// invocation and never mutated.
///
/// These steer the thread and voice-channel branches: threads cannot parent
/// threads, and a new voice channel lands beside the invoking channel
/// rather than always at the top level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelContext {
    /// The invoking channel is itself a thread.
    pub is_thread: bool,
    /// Parent category of the invoking channel, if it has one.
    pub parent_category: Option<u64>,
}

impl ChannelContext {
    /// A stray channel belongs to no category; resources created from it
    /// land at the top of the channel list.
    pub fn is_stray(&self) -> bool {
        self.parent_category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stray_means_no_parent_category() {
        assert!(ChannelContext::default().is_stray());
        let nested = ChannelContext {
            is_thread: false,
            parent_category: Some(42),
        };
        assert!(!nested.is_stray());
    }
}
