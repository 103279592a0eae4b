/// Toolkit-independent view of a pressed key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Tab,
    Char(char),
    Other,
}

/// Global kiosk shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    /// Tab: show or hide the manual input panel
    ToggleControls,
    /// `(`: enter or leave fullscreen
    ToggleFullscreen,
    /// `)`: ask the server to reload its data
    RefreshData,
}

impl Hotkey {
    /// `None` means the key is not ours and should propagate
    pub fn from_key(key: KeyInput) -> Option<Self> {
        match key {
            KeyInput::Tab => Some(Hotkey::ToggleControls),
            KeyInput::Char('(') => Some(Hotkey::ToggleFullscreen),
            KeyInput::Char(')') => Some(Hotkey::RefreshData),
            _ => None,
        }
    }
}
