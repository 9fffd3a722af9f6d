//! 発見進捗の計算

/// 発見率（%）。ストアのキーはカタログ名に限定されないため [0, 100] に丸める
pub fn percent(spotted: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (spotted as f64 * 100.0 / total as f64).clamp(0.0, 100.0)
}

/// 進捗ラベル
pub fn label(spotted: usize, total: usize) -> String {
    format!("Microorganisms Spotted: {} / {}", spotted, total)
}

/// テキスト版プログレスバー（CLI表示用）
pub fn text_bar(spotted: usize, total: usize, width: usize) -> String {
    let filled = ((percent(spotted, total) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_every_reachable_size() {
        for spotted in 0..=10 {
            assert_eq!(percent(spotted, 10), spotted as f64 * 10.0);
        }
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(percent(12, 10), 100.0);
        assert_eq!(percent(3, 0), 0.0);
    }

    #[test]
    fn test_label() {
        assert_eq!(label(2, 10), "Microorganisms Spotted: 2 / 10");
    }

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0, 10, 10), "[----------]");
        assert_eq!(text_bar(3, 10, 10), "[###-------]");
        assert_eq!(text_bar(15, 10, 4), "[####]");
    }
}
