use core::fmt;

/// An opaque handle identifying a view in the host's hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Setup-time misconfiguration of the sticky/placeholder pair.
///
/// Fatal: the caller must fix the configuration; nothing in this crate
/// recovers from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingStickyView,
    MissingPlaceholderView,
    /// Sticky and placeholder resolved to the same view.
    SameView(ViewId),
    /// A view is not a child of the host container.
    NotInContainer(ViewId),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStickyView => f.write_str("sticky view must be set"),
            Self::MissingPlaceholderView => f.write_str("placeholder view must be set"),
            Self::SameView(id) => {
                write!(f, "sticky and placeholder must not be the same view ({id})")
            }
            Self::NotInContainer(id) => {
                write!(f, "view {id} must be a child of the host container")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// The validated sticky/placeholder pair.
///
/// Locating the views in the host's tree is the embedding's job; this type
/// only captures the one-time binding step and its hard validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderViews {
    pub sticky: ViewId,
    pub placeholder: ViewId,
}

impl HeaderViews {
    /// Binds the pair, checking that both handles were resolved, that they are
    /// distinct, and that both live among `container_children` (the children
    /// of the container hosting the list).
    pub fn bind(
        sticky: Option<ViewId>,
        placeholder: Option<ViewId>,
        container_children: &[ViewId],
    ) -> Result<Self, ConfigError> {
        let sticky = sticky.ok_or(ConfigError::MissingStickyView)?;
        let placeholder = placeholder.ok_or(ConfigError::MissingPlaceholderView)?;
        if sticky == placeholder {
            return Err(ConfigError::SameView(sticky));
        }
        for id in [sticky, placeholder] {
            if !container_children.contains(&id) {
                return Err(ConfigError::NotInContainer(id));
            }
        }
        Ok(Self {
            sticky,
            placeholder,
        })
    }
}
