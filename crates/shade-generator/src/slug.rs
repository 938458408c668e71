//! Converts palette and color names into stable, URL safe ids.
//!
//! Based on the following function from another crate:
//! https://docs.rs/slug/latest/slug/fn.slugify.html
//!
//! Ported rather than pulled in as a dependency because ids here must stay
//! byte-for-byte stable: they are embedded in shade ids and external links,
//! and we do not want a crate upgrade to silently reshuffle them.

pub fn slugify(s: &str) -> String {
    let mut slug: Vec<u8> = Vec::with_capacity(s.len());
    // Starts with true to avoid leading -
    let mut prev_is_dash = true;
    {
        let mut push_char = |x: char| match x {
            'a'..='z' | '0'..='9' | '.' | '_' | '~' => {
                prev_is_dash = false;
                slug.push(x as u8);
            }
            'A'..='Z' => {
                prev_is_dash = false;
                slug.push(x.to_ascii_lowercase() as u8);
            }
            _ => {
                if !prev_is_dash {
                    slug.push(b'-');
                    prev_is_dash = true;
                }
            }
        };

        for c in s.chars() {
            if c.is_ascii() {
                (push_char)(c);
            } else {
                for cx in deunicode::deunicode_char(c).unwrap_or("-").chars() {
                    (push_char)(cx);
                }
            }
        }
    }

    let mut string = String::from_utf8(slug).expect("Generated non-utf8 slug");
    if string.ends_with('-') {
        string.pop();
    }
    // We likely reserved more space than needed.
    string.shrink_to_fit();
    string
}
