use super::*;

#[test]
fn open_gate_without_configured_passphrase() {
    assert_eq!(Access::from_passphrase(None, None), Access::Granted);
    assert_eq!(Access::from_passphrase(None, Some("anything")), Access::Granted);
}

#[test]
fn configured_passphrase_must_match() {
    assert_eq!(Access::from_passphrase(Some("heart"), Some("heart")), Access::Granted);
    assert_eq!(Access::from_passphrase(Some("heart"), Some("Heart")), Access::Denied);
    assert_eq!(Access::from_passphrase(Some("heart"), None), Access::Denied);
}
