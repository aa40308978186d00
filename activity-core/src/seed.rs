//! Activities every directory starts with.

use crate::models::Activity;

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        ),
        Activity::new(
            "Basketball Club",
            "Practice basketball skills and play friendly games",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce school plays and performances",
            "Mondays, 4:00 PM - 5:30 PM",
            18,
        ),
        Activity::new(
            "Art Workshop",
            "Explore painting, drawing, and sculpture techniques",
            "Fridays, 2:00 PM - 4:00 PM",
            16,
        ),
        Activity::new(
            "Mathletes",
            "Compete in math competitions and solve challenging problems",
            "Thursdays, 3:30 PM - 5:00 PM",
            10,
        ),
        Activity::new(
            "Science Club",
            "Conduct experiments and participate in science fairs",
            "Wednesdays, 4:00 PM - 5:30 PM",
            14,
        ),
    ]
}
