use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimKind {
    /// Degenerate transition: completes as soon as it is started.
    None,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fade,
}

impl AnimKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MoveLeft => "move-left",
            Self::MoveRight => "move-right",
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
            Self::Fade => "fade",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "move-left" => Some(Self::MoveLeft),
            "move-right" => Some(Self::MoveRight),
            "move-up" => Some(Self::MoveUp),
            "move-down" => Some(Self::MoveDown),
            "fade" => Some(Self::Fade),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Step,
    Overshoot,
    Bounce,
}

impl AnimCurve {
    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Step => "step",
            Self::Overshoot => "overshoot",
            Self::Bounce => "bounce",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "linear" => Some(Self::Linear),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            "step" => Some(Self::Step),
            "overshoot" => Some(Self::Overshoot),
            "bounce" => Some(Self::Bounce),
            _ => None,
        }
    }
}

/// One configured transition: what motion, which curve, how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimAttr {
    pub kind: AnimKind,
    pub curve: AnimCurve,
    pub duration: Duration,
}

impl AnimAttr {
    pub fn new(kind: AnimKind, curve: AnimCurve, duration: Duration) -> Self {
        Self {
            kind,
            curve,
            duration,
        }
    }

    pub fn none() -> Self {
        Self {
            kind: AnimKind::None,
            curve: AnimCurve::Linear,
            duration: Duration::ZERO,
        }
    }

    pub fn clamped(mut self, max_duration: Duration) -> Self {
        self.duration = self.duration.min(max_duration);
        self
    }
}

/// The four transition records of one page: how it enters and leaves the
/// screen for a push and for a pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimDescriptor {
    pub push_in: AnimAttr,
    pub push_out: AnimAttr,
    pub pop_out: AnimAttr,
    pub pop_in: AnimAttr,
}

impl Default for AnimDescriptor {
    fn default() -> Self {
        Self {
            push_in: AnimAttr::none(),
            push_out: AnimAttr::none(),
            pop_out: AnimAttr::none(),
            pop_in: AnimAttr::none(),
        }
    }
}

impl AnimDescriptor {
    pub fn uniform(kind: AnimKind, curve: AnimCurve, duration: Duration) -> Self {
        let attr = AnimAttr::new(kind, curve, duration);
        Self {
            push_in: attr,
            push_out: attr,
            pop_out: attr,
            pop_in: attr,
        }
    }

    pub fn clamped(self, max_duration: Duration) -> Self {
        Self {
            push_in: self.push_in.clamped(max_duration),
            push_out: self.push_out.clamped(max_duration),
            pop_out: self.pop_out.clamped(max_duration),
            pop_in: self.pop_in.clamped(max_duration),
        }
    }
}
