/// Output file name for a prompt: spaces become underscores, `.jpg` is appended.
///
/// Nothing else is escaped, so path separators in the prompt end up in the path.
pub fn image_filename(prompt: &str) -> String {
    format!("{}.jpg", prompt.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::image_filename;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(image_filename("a red fox"), "a_red_fox.jpg");
        assert_eq!(image_filename("  two  gaps "), "__two__gaps_.jpg");
    }

    #[test]
    fn other_characters_are_kept() {
        assert_eq!(image_filename("cat?/dog"), "cat?/dog.jpg");
        assert_eq!(image_filename("tab\there"), "tab\there.jpg");
    }

    #[test]
    fn empty_prompt() {
        assert_eq!(image_filename(""), ".jpg");
    }
}
