//! Demo records loaded at startup.

use crate::models::{Activity, User};

const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/68503415?s=400&u=961cb483c912c8c3a6ce63c9ed8793a79b81ac61&v=4";
const PILATES_IMAGE_URL: &str = "https://images.unsplash.com/photo-1522898467493-49726bf28798?q=80&w=1470&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const CYCLING_IMAGE_URL: &str = "https://images.unsplash.com/photo-1480264104733-84fb0b925be3?q=80&w=1470&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

fn user(id: u64, username: &str, email: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: email.to_string(),
    }
}

/// Seed users. `user2` and `user3` share an email address.
pub fn users() -> Vec<User> {
    vec![
        user(1, "user1", "user1@example.com"),
        user(2, "user2", "user2@example.com"),
        user(3, "user3", "user2@example.com"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: u64,
    time: &str,
    kind: &str,
    distance: &str,
    calories: &str,
    bpm: &str,
    owner: &str,
    likes: i32,
    comments: i32,
    image_url: &str,
) -> Activity {
    Activity {
        id,
        time: time.to_string(),
        kind: kind.to_string(),
        distance: distance.to_string(),
        calories: calories.to_string(),
        bpm: bpm.to_string(),
        user: owner.to_string(),
        user_image: AVATAR_URL.to_string(),
        likes,
        comments,
        image_url: image_url.to_string(),
    }
}

/// Seed activities.
pub fn activities() -> Vec<Activity> {
    vec![
        activity(1, "07:00", "Pilates", "5", "300", "120", "user1", 10, 5, PILATES_IMAGE_URL),
        activity(2, "08:00", "Ciclismo", "10", "500", "110", "user2", 20, 10, CYCLING_IMAGE_URL),
        activity(3, "08:00", "Nataçãoß", "10", "500", "110", "user2", 20, 10, CYCLING_IMAGE_URL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_matches_demo_data() {
        let users = users();
        assert_eq!(users.len(), 3);
        // Duplicate emails are part of the demo data.
        assert_eq!(users[1].email, users[2].email);

        let activities = activities();
        let kinds: Vec<&str> = activities.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, ["Pilates", "Ciclismo", "Nataçãoß"]);
        assert_eq!(
            activities.iter().map(|a| a.id).collect::<Vec<_>>(),
            [1, 2, 3]
        );
        assert_eq!(activities[0].likes, 10);
        assert_eq!(activities[0].comments, 5);
    }
}
