use anyhow::{Context, Result, bail};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};

/// An owned registration for one global key chord.
///
/// The registration lives as long as the subscription value; dropping it
/// unregisters the chord. Presses arrive on the process-wide
/// [`GlobalHotKeyEvent`] receiver and are matched by id via [`poll_pressed`].
pub struct HotkeySubscription {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeySubscription {
    /// Register a combo such as `"cmd+shift+o"` system-wide.
    pub fn register(combo: &str) -> Result<Self> {
        let (modifiers, code) = parse_combo(combo)?;

        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;
        let hotkey = HotKey::new(modifiers, code);

        manager
            .register(hotkey)
            .with_context(|| format!("Failed to register hotkey '{combo}'"))?;

        Ok(Self { manager, hotkey })
    }

    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

impl Drop for HotkeySubscription {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.hotkey);
    }
}

/// Drain pending hotkey events, reporting whether the chord with `id` was
/// pressed. Non-blocking; release events are ignored.
pub fn poll_pressed(id: u32) -> bool {
    let receiver = GlobalHotKeyEvent::receiver();
    let mut pressed = false;
    while let Ok(event) = receiver.try_recv() {
        if event.id == id && event.state == HotKeyState::Pressed {
            pressed = true;
        }
    }
    pressed
}

/// Parse a `+`-separated combo string: zero or more modifiers followed by
/// exactly one key, e.g. `"ctrl+shift+o"` or `"f9"`.
pub fn parse_combo(combo: &str) -> Result<(Option<Modifiers>, Code)> {
    let tokens: Vec<&str> = combo.split('+').map(str::trim).collect();
    let (key, modifier_tokens) = match tokens.split_last() {
        Some((key, rest)) if !key.is_empty() => (*key, rest),
        _ => bail!("empty hotkey combo '{combo}'"),
    };

    let mut modifiers = Modifiers::empty();
    for token in modifier_tokens {
        modifiers |= parse_modifier(token)?;
    }

    let code = parse_key(key)?;
    let modifiers = (!modifiers.is_empty()).then_some(modifiers);
    Ok((modifiers, code))
}

fn parse_modifier(token: &str) -> Result<Modifiers> {
    let modifier = match token.to_ascii_lowercase().as_str() {
        "cmd" | "command" | "super" | "meta" | "win" => Modifiers::META,
        "ctrl" | "control" => Modifiers::CONTROL,
        "shift" => Modifiers::SHIFT,
        "alt" | "option" | "opt" => Modifiers::ALT,
        _ => bail!("unknown modifier '{token}' in hotkey combo"),
    };
    Ok(modifier)
}

fn parse_key(token: &str) -> Result<Code> {
    let code = match token.to_ascii_lowercase().as_str() {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "escape" | "esc" => Code::Escape,
        _ => bail!("unsupported key '{token}' in hotkey combo"),
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_macos_combo() {
        let (modifiers, code) = parse_combo("cmd+shift+o").unwrap();
        assert_eq!(modifiers, Some(Modifiers::META | Modifiers::SHIFT));
        assert_eq!(code, Code::KeyO);
    }

    #[test]
    fn test_parse_ctrl_combo() {
        let (modifiers, code) = parse_combo("ctrl+shift+o").unwrap();
        assert_eq!(modifiers, Some(Modifiers::CONTROL | Modifiers::SHIFT));
        assert_eq!(code, Code::KeyO);
    }

    #[test]
    fn test_parse_bare_function_key() {
        let (modifiers, code) = parse_combo("f9").unwrap();
        assert_eq!(modifiers, None);
        assert_eq!(code, Code::F9);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let (modifiers, code) = parse_combo("Cmd+Shift+O").unwrap();
        assert_eq!(modifiers, Some(Modifiers::META | Modifiers::SHIFT));
        assert_eq!(code, Code::KeyO);
    }

    #[test]
    fn test_reject_unknown_key() {
        assert!(parse_combo("ctrl+banana").is_err());
    }

    #[test]
    fn test_reject_trailing_separator() {
        assert!(parse_combo("ctrl+").is_err());
    }

    #[test]
    fn test_reject_empty_combo() {
        assert!(parse_combo("").is_err());
    }
}
