mod os_hotkey;

pub use os_hotkey::GlobalHotkeyAdapter;
