//! Deterministic demo data for windowed lists.
//!
//! Records are fixed-shape so every row has the same rendered height; the content only varies
//! by index, which keeps generated datasets reproducible across runs.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub const CITIES: [&str; 10] = [
    "Seoul", "Busan", "Incheon", "Daegu", "Daejeon", "Gwangju", "Ulsan", "Suwon", "Changwon",
    "Goyang",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub city: String,
}

impl Record {
    /// Builds the record stored at zero-based position `index`.
    pub fn at(index: u64) -> Self {
        let id = index + 1;
        Self {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            age: 20 + (index % 50) as u32,
            city: String::from(CITIES[(index % CITIES.len() as u64) as usize]),
        }
    }
}

/// Generates `count` records with ids `1..=count`.
pub fn generate(count: usize) -> Vec<Record> {
    vdebug!(count, "dataset::generate");
    (0..count as u64).map(Record::at).collect()
}

/// A post in an append-only feed.
///
/// Engagement counts are derived from the id, so a page always has the same content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub likes: u32,
    pub comments: u32,
    pub image: String,
}

impl Post {
    /// Authors rotate through this many user names.
    pub const AUTHORS: u64 = 20;

    /// Builds the post with the given 1-based `id`.
    pub fn with_id(id: u64) -> Self {
        let mix = scramble(id);
        Self {
            id,
            title: format!("Post {id}"),
            content: format!(
                "This is the body of post {id}. More posts load as you reach the end of the feed."
            ),
            author: format!("user{}", id % Self::AUTHORS + 1),
            likes: (mix % 1_000) as u32,
            comments: ((mix >> 32) % 100) as u32,
            image: format!("https://picsum.photos/seed/{id}/400/250"),
        }
    }
}

// splitmix64 finalizer
fn scramble(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generates one page of feed posts. Pages are 1-based; page `p` starts at id
/// `(p - 1) * page_size + 1`.
pub fn page(page: u32, page_size: usize) -> Vec<Post> {
    let first = (page.max(1) as u64 - 1).saturating_mul(page_size as u64);
    (first..first.saturating_add(page_size as u64))
        .map(|index| Post::with_id(index + 1))
        .collect()
}

/// The dataset sizes a host offers for selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatasetSize {
    Thousand,
    #[default]
    TenThousand,
    HundredThousand,
}

impl DatasetSize {
    pub const ALL: [Self; 3] = [Self::Thousand, Self::TenThousand, Self::HundredThousand];

    pub fn count(self) -> usize {
        match self {
            Self::Thousand => 1_000,
            Self::TenThousand => 10_000,
            Self::HundredThousand => 100_000,
        }
    }

    pub fn generate(self) -> Vec<Record> {
        generate(self.count())
    }
}
