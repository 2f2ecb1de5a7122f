//! Text formatting utilities

/// Capitalize the first letter of every word, lowercasing the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = c.is_whitespace() || c == '-';
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("2 years, 3 days"), "2 Years, 3 Days");
        assert_eq!(title_case("less than a minute"), "Less Than A Minute");
        assert_eq!(title_case("-1 HOUR"), "-1 Hour");
    }

    #[test]
    fn keeps_apostrophes_inside_words() {
        assert_eq!(title_case("moins d'une minute"), "Moins D'une Minute");
    }
}
