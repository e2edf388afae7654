//! Blog entries and their validated inputs.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Error, UserId};

/// Validation failures for blog identifiers and drafts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogValidationError {
    /// Identifier was not a canonical UUID.
    #[error("blog id must be a valid UUID")]
    InvalidId,
    /// Title was blank once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Author was blank once trimmed.
    #[error("author must not be empty")]
    EmptyAuthor,
    /// URL was blank once trimmed.
    #[error("url must not be empty")]
    EmptyUrl,
}

impl BlogValidationError {
    /// Payload field the failure refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyTitle => "title",
            Self::EmptyAuthor => "author",
            Self::EmptyUrl => "url",
        }
    }

    /// Stable machine-readable detail code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyTitle => "empty_title",
            Self::EmptyAuthor => "empty_author",
            Self::EmptyUrl => "empty_url",
        }
    }
}

impl From<BlogValidationError> for Error {
    fn from(err: BlogValidationError) -> Self {
        let details = serde_json::json!({ "field": err.field(), "code": err.code() });
        Error::invalid_request(err.to_string()).with_details(details)
    }
}

/// Stable blog entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse an identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated title/author/url triple for a new entry.
///
/// ## Invariants
/// - Every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    url: String,
}

impl BlogDraft {
    /// Validate raw inputs.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::{BlogDraft, BlogValidationError};
    ///
    /// let draft = BlogDraft::try_from_parts("Rust", "Ferris", "https://rust-lang.org").unwrap();
    /// assert_eq!(draft.title(), "Rust");
    /// assert_eq!(
    ///     BlogDraft::try_from_parts(" ", "Ferris", "u"),
    ///     Err(BlogValidationError::EmptyTitle)
    /// );
    /// ```
    pub fn try_from_parts(
        title: &str,
        author: &str,
        url: &str,
    ) -> Result<Self, BlogValidationError> {
        let title = non_blank(title).ok_or(BlogValidationError::EmptyTitle)?;
        let author = non_blank(author).ok_or(BlogValidationError::EmptyAuthor)?;
        let url = non_blank(url).ok_or(BlogValidationError::EmptyUrl)?;
        Ok(Self { title, author, url })
    }

    /// Entry title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entry author as typed by the publisher.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to the blog itself.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// A published blog entry.
///
/// ## Invariants
/// - `owner` is fixed at creation.
/// - `likes` never decreases.
/// - `sequence` is unique and strictly increasing in creation order within a
///   repository; it is the ranking tie-break key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    id: BlogId,
    title: String,
    author: String,
    url: String,
    likes: u64,
    owner: UserId,
    sequence: u64,
    created_at: DateTime<Utc>,
}

impl BlogEntry {
    /// Materialise a freshly created entry with zero likes.
    #[must_use]
    pub fn create(
        id: BlogId,
        draft: BlogDraft,
        owner: UserId,
        sequence: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let BlogDraft { title, author, url } = draft;
        Self {
            id,
            title,
            author,
            url,
            likes: 0,
            owner,
            sequence,
            created_at,
        }
    }

    /// Record one like. Saturates rather than wrapping.
    pub fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    /// Identifier.
    #[must_use]
    pub fn id(&self) -> BlogId {
        self.id
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of likes recorded so far.
    #[must_use]
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// User who created the entry.
    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Creation-order counter.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a", "u", BlogValidationError::EmptyTitle)]
    #[case("t", "  ", "u", BlogValidationError::EmptyAuthor)]
    #[case("t", "a", "\t", BlogValidationError::EmptyUrl)]
    fn draft_rejects_blank_fields(
        #[case] title: &str,
        #[case] author: &str,
        #[case] url: &str,
        #[case] expected: BlogValidationError,
    ) {
        assert_eq!(BlogDraft::try_from_parts(title, author, url), Err(expected));
    }

    #[rstest]
    fn created_entry_starts_without_likes() {
        let owner = UserId::random();
        let draft =
            BlogDraft::try_from_parts(" Title ", "Author", "https://x.test").expect("draft");
        let entry = BlogEntry::create(BlogId::random(), draft, owner.clone(), 7, Utc::now());
        assert_eq!(entry.likes(), 0);
        assert_eq!(entry.owner(), &owner);
        assert_eq!(entry.title(), "Title");
        assert_eq!(entry.sequence(), 7);
    }

    #[rstest]
    fn record_like_increments_by_one() {
        let draft = BlogDraft::try_from_parts("t", "a", "u").expect("draft");
        let mut entry = BlogEntry::create(BlogId::random(), draft, UserId::random(), 0, Utc::now());
        entry.record_like();
        entry.record_like();
        assert_eq!(entry.likes(), 2);
    }

    #[rstest]
    fn blog_id_rejects_garbage() {
        assert_eq!(BlogId::new("nope"), Err(BlogValidationError::InvalidId));
        assert_eq!(BlogValidationError::InvalidId.field(), "id");
    }
}
