pub fn identity_key(user_id: &str) -> String {
    user_id.trim().to_string()
}

pub fn solved_set_key(user_id: &str) -> String {
    user_id.trim().to_string()
}
