//! Token view handed to a descriptor's value reader.

/// The tokens a value-taking option may consume.
///
/// `inline` is text glued to the option itself (`--name=value`, `-cvalue`);
/// when present it is the first available token and shares the option's
/// argument slot.
#[derive(Debug)]
pub struct ValueSource<'a, S = String> {
    inline: Option<&'a str>,
    rest: &'a [S],
}

impl<S> Clone for ValueSource<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ValueSource<'_, S> {}

impl<'a, S: AsRef<str>> ValueSource<'a, S> {
    pub fn new(rest: &'a [S]) -> Self {
        Self { inline: None, rest }
    }

    pub fn with_inline(inline: &'a str, rest: &'a [S]) -> Self {
        Self {
            inline: Some(inline),
            rest,
        }
    }

    pub fn has_inline(&self) -> bool {
        self.inline.is_some()
    }

    pub fn len(&self) -> usize {
        self.rest.len() + usize::from(self.inline.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<&'a str> {
        match self.inline {
            Some(v) if idx == 0 => Some(v),
            Some(_) => self.rest.get(idx - 1).map(AsRef::as_ref),
            None => self.rest.get(idx).map(AsRef::as_ref),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let rest = self.rest;
        self.inline
            .into_iter()
            .chain(rest.iter().map(AsRef::as_ref))
    }
}
