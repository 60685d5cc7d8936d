//! 表示用フォーマット

/// 先頭の1文字だけ大文字にする
pub fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// パーセント値を表示用に整形
///
/// 小数2桁で丸め、末尾の0と小数点は落とす（87.0 → "87"）
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
