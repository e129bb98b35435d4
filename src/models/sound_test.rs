// src/models/sound_test.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'sound_tests' table in the database.
///
/// The four `*_id` columns are the answer key for the daily guessing game and
/// must never be serialized to clients while the test is featured; use the
/// public DTOs below instead.
#[derive(Debug, Clone, FromRow)]
pub struct SoundTest {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub audio_url: String,
    pub keyboard_id: String,
    pub plate_material_id: String,
    pub keycap_material_id: String,
    pub keyswitch_id: String,
    /// Date this test is (or was) the sound test of the day. NULL if never featured.
    pub featured_on: Option<chrono::NaiveDate>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Listing row DTO: joined vote totals plus the window count of all tests,
/// which the client uses to decide whether a next page exists.
#[derive(Debug, Serialize, FromRow)]
pub struct SoundTestInfo {
    pub id: i64,
    pub title: String,
    pub audio_url: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub total_votes: i64,
    /// The requesting user's own vote (-1 or 1), if logged in and voted.
    pub user_vote: Option<i16>,
    pub total_tests: i64,
}

/// Public DTO for the featured sound test of the day.
/// Deliberately excludes the component ids so the answer cannot be scraped.
#[derive(Debug, Serialize, FromRow)]
pub struct FeaturedSoundTest {
    pub id: i64,
    pub title: String,
    pub audio_url: String,
}

/// DTO for uploading a new sound test.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSoundTestRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub audio_url: String,
    #[validate(length(min = 1, max = 100))]
    pub keyboard_id: String,
    #[validate(length(min = 1, max = 100))]
    pub plate_material_id: String,
    #[validate(length(min = 1, max = 100))]
    pub keycap_material_id: String,
    #[validate(length(min = 1, max = 100))]
    pub keyswitch_id: String,
}

/// DTO for casting a vote. 1 upvote, -1 downvote, 0 removes the vote.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub value: i16,
}

/// Sort orders accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundTestSort {
    Latest,
    Popular,
}

impl Default for SoundTestSort {
    fn default() -> Self {
        SoundTestSort::Latest
    }
}
