/// Whether the letters of `input` read the same forward and backward.
///
/// Non-letter characters are discarded and case is folded to lowercase before
/// the comparison. An input with no letters at all (empty, digits-only,
/// punctuation-only) is trivially a palindrome.
pub fn is_palindrome(input: &str) -> bool {
    let letters: Vec<char> = input
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    letters.iter().eq(letters.iter().rev())
}
