use chrono::{DateTime, Utc};

use getrandom::fill;

pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}

pub fn ts_to_rfc3339(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .to_rfc3339()
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    fill(&mut out).expect("OS random number generator unavailable");
    out
}

/// Random UUIDv4 string (8-4-4-4-12 lowercase hex) used as row ids.
pub fn uuid_v4() -> String {
    let mut b = random_bytes(16);

    // Set version = 4.
    b[6] = (b[6] & 0x0f) | 0x40;
    // Set variant = RFC4122.
    b[8] = (b[8] & 0x3f) | 0x80;

    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(36);

    for (i, byte) in b.iter().enumerate() {
        if i == 4 || i == 6 || i == 8 || i == 10 {
            out.push('-');
        }
        out.push(LUT[(byte >> 4) as usize] as char);
        out.push(LUT[(byte & 0x0f) as usize] as char);
    }

    out
}

/// Trim a request field, treating blank input as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
