//! Commands returned by `update` for the host layer to carry out

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Content, cursor or viewport changed; draw again
    Redraw,
    /// Scrolling has not settled; send `ViewMsg::Tick` next frame
    AnimateScroll,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::AnimateScroll => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// True if another animation frame was asked for
    pub fn wants_tick(&self) -> bool {
        match self {
            Cmd::AnimateScroll => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.wants_tick()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::None]).needs_redraw());
    }

    #[test]
    fn test_wants_tick() {
        assert!(Cmd::AnimateScroll.wants_tick());
        assert!(Cmd::batch(vec![Cmd::Redraw, Cmd::AnimateScroll]).wants_tick());
        assert!(!Cmd::Redraw.wants_tick());
    }
}
