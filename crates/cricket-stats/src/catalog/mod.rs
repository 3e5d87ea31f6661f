//! The analytical query catalog.
//!
//! Each operation is a function over a borrowed [`Store`](crate::Store) that
//! returns typed rows. Row types implement [`stats_table::Row`] so they can
//! be rendered without further conversion.

pub mod batting;
pub mod wins;

pub use batting::{highest_strike_rate, StrikeRateRecord, STRIKE_RATE_LIMIT};
pub use wins::{
    highest_win_percentage, team_win_statistics, GenderLeader, TeamWinRecord,
    LEADERBOARD_SEASON, SENTINEL_WIN_TYPE,
};
