pub const IDENTITIES: &str = "discord_users";
pub const SOLVED_PROBLEMS: &str = "solved_problems";
