/// Interface and peer keys understood by wg-quick.
pub const DIRECTIVES: &[&str] = &[
    "Address",
    "DNS",
    "MTU",
    "Table",
    "PreUp",
    "PostUp",
    "PreDown",
    "PostDown",
    "SaveConfig",
    "FwMark",
    "ListenPort",
    "PrivateKey",
    "PublicKey",
    "AllowedIPs",
    "Endpoint",
    "PersistentKeepalive",
    "PresharedKey",
];

fn is_directive_name(token: &str) -> bool {
    DIRECTIVES
        .iter()
        .any(|name| token.eq_ignore_ascii_case(name))
}

/// Returns true when a comment body is a commented-out directive rather than free text.
///
/// `key = value` forms are matched on the key token. Anything else matches when its lowercase
/// text starts with a directive name, so `Table 1234` and `Tablet` both count.
pub fn is_directive(comment: &str) -> bool {
    let comment = comment.trim();

    if let Some((key, _)) = comment.split_once('=') {
        if is_directive_name(key.trim()) {
            return true;
        }
    }

    let lower = comment.to_ascii_lowercase();
    DIRECTIVES
        .iter()
        .any(|name| lower.starts_with(&name.to_ascii_lowercase()))
}
