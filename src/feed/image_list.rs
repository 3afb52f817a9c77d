use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator used by merchant catalogs that ship additional images as one string.
pub const IMAGE_SEPARATOR: char = ',';

/// Ordered list of additional product image URLs.
///
/// Catalog exports usually carry this attribute as a single comma-joined
/// string. [`ImageList::parse`] turns that string into the ordered sequence
/// and [`ImageList::joined`] turns it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList(Vec<String>);

impl ImageList {
    /// Splits a comma-joined image string.
    ///
    /// Entries are neither trimmed nor filtered: `""` yields one empty entry
    /// and a trailing separator yields a trailing empty entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use syndicate::feed::ImageList;
    ///
    /// let list = ImageList::parse("a.png,b.png");
    /// assert_eq!(list.as_slice(), ["a.png", "b.png"]);
    /// assert_eq!(ImageList::parse("").as_slice(), [""]);
    /// ```
    pub fn parse(joined: &str) -> Self {
        Self(joined.split(IMAGE_SEPARATOR).map(str::to_string).collect())
    }

    pub fn joined(&self) -> String {
        let mut buf = [0; 4];
        self.0.join(&*IMAGE_SEPARATOR.encode_utf8(&mut buf))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Serialize for ImageList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Accepts either the catalog's comma-joined string or an explicit array.
impl<'de> Deserialize<'de> for ImageList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Joined(String),
            List(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Joined(joined) => Self::parse(&joined),
            Repr::List(list) => Self(list),
        })
    }
}
