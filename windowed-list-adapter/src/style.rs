use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Keyframes for the loading indicator shown while a feed page is in flight.
pub const LOADING_SPINNER: StyleSheet = StyleSheet {
    name: Cow::Borrowed("loading-spinner"),
    body: Cow::Borrowed(
        "@keyframes spin {\n  0% { transform: rotate(0deg); }\n  100% { transform: rotate(360deg); }\n}\n",
    ),
};

/// A named block of host stylesheet text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSheet {
    pub name: Cow<'static, str>,
    pub body: Cow<'static, str>,
}

impl StyleSheet {
    pub fn new(name: impl Into<Cow<'static, str>>, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Stylesheets a host must install once at startup.
///
/// Registration is explicit and idempotent: registering a name that is already present keeps
/// the first sheet and returns `false`. Hosts install [`Self::sheets`] in registration order.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    sheets: Vec<StyleSheet>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sheet: StyleSheet) -> bool {
        if self.contains(&sheet.name) {
            vtrace!(name = %sheet.name, "StyleRegistry: already registered");
            return false;
        }
        vdebug!(name = %sheet.name, "StyleRegistry: registered");
        self.sheets.push(sheet);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    pub fn sheets(&self) -> &[StyleSheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
