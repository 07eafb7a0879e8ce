pub fn truncate_label(label: &str, max_chars: usize) -> &str {
    match label.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &label[..byte_offset],
        None => label,
    }
}
