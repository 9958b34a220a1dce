//! Calls-to-action and the closed action union they are bound to.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual kind of a CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaKind {
    Button,
    Link,
    IconButton,
}

impl CtaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Link => "link",
            Self::IconButton => "icon-button",
        }
    }
}

/// Visual emphasis of a CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaPriority {
    Primary,
    Secondary,
    Tertiary,
    Danger,
    Ghost,
}

impl CtaPriority {
    pub const ALL: [CtaPriority; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Danger,
        Self::Ghost,
    ];
}

/// CTA size. Unset sizes render as [`CtaSize::Md`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Whether a route navigation extends or replaces history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMethod {
    #[default]
    Push,
    Replace,
}

/// The side effect a CTA triggers. Exactly one variant is active.
///
/// Fields that belong to another variant are rejected on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    rename_all_fields = "camelCase",
    deny_unknown_fields
)]
pub enum CtaAction {
    Route {
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<NavigationMethod>,
    },
    ExternalUrl {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        open_in_new_tab: Option<bool>,
    },
    Mailto {
        email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    Phone {
        number: String,
    },
    Download {
        file_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
    CopyToClipboard {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        toast_message: Option<String>,
    },
    Custom {
        handler_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Noop {},
}

impl Default for CtaAction {
    fn default() -> Self {
        Self::Noop {}
    }
}

/// Payload-free discriminant of [`CtaAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Route,
    ExternalUrl,
    Mailto,
    Phone,
    Download,
    CopyToClipboard,
    Custom,
    Noop,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        Self::Route,
        Self::ExternalUrl,
        Self::Mailto,
        Self::Phone,
        Self::Download,
        Self::CopyToClipboard,
        Self::Custom,
        Self::Noop,
    ];

    /// Wire discriminant (`"copy_to_clipboard"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Route => "route",
            Self::ExternalUrl => "external_url",
            Self::Mailto => "mailto",
            Self::Phone => "phone",
            Self::Download => "download",
            Self::CopyToClipboard => "copy_to_clipboard",
            Self::Custom => "custom",
            Self::Noop => "noop",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CtaAction {
    /// The active variant's discriminant.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Route { .. } => ActionKind::Route,
            Self::ExternalUrl { .. } => ActionKind::ExternalUrl,
            Self::Mailto { .. } => ActionKind::Mailto,
            Self::Phone { .. } => ActionKind::Phone,
            Self::Download { .. } => ActionKind::Download,
            Self::CopyToClipboard { .. } => ActionKind::CopyToClipboard,
            Self::Custom { .. } => ActionKind::Custom,
            Self::Noop {} => ActionKind::Noop,
        }
    }

    /// A fresh action of `kind` with empty required fields and no optional ones.
    pub fn for_kind(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Route => Self::Route {
                target: String::new(),
                method: None,
            },
            ActionKind::ExternalUrl => Self::ExternalUrl {
                url: String::new(),
                open_in_new_tab: None,
            },
            ActionKind::Mailto => Self::Mailto {
                email: String::new(),
                subject: None,
                body: None,
            },
            ActionKind::Phone => Self::Phone {
                number: String::new(),
            },
            ActionKind::Download => Self::Download {
                file_url: String::new(),
                file_name: None,
            },
            ActionKind::CopyToClipboard => Self::CopyToClipboard {
                text: String::new(),
                toast_message: None,
            },
            ActionKind::Custom => Self::Custom {
                handler_id: String::new(),
                payload: None,
            },
            ActionKind::Noop => Self::Noop {},
        }
    }
}

/// A labeled interactive element bound to exactly one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaConfig {
    pub id: String,
    pub label: String,
    pub kind: CtaKind,
    pub priority: CtaPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CtaSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub action: CtaAction,
}

impl CtaConfig {
    /// A button with the given priority and action.
    pub fn button(
        id: impl Into<String>,
        label: impl Into<String>,
        priority: CtaPriority,
        action: CtaAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: CtaKind::Button,
            priority,
            size: None,
            icon: None,
            action,
        }
    }

    /// Set the kind (builder).
    pub fn with_kind(mut self, kind: CtaKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the size (builder).
    pub fn with_size(mut self, size: CtaSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the icon (builder).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The size that renders when none is set.
    pub fn effective_size(&self) -> CtaSize {
        self.size.unwrap_or_default()
    }

    /// Switch the action to `kind`. The previous variant's payload is discarded;
    /// asking for the current kind keeps the action as is.
    pub fn set_action_kind(&mut self, kind: ActionKind) {
        if self.action.kind() != kind {
            self.action = CtaAction::for_kind(kind);
        }
    }
}
