use types::{Activities, Activity};

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(ToString::to_string).collect(),
    }
}

/// The activities offered at the start of the school year.
pub fn activities() -> Activities {
    let mut activities = Activities::new();
    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Team".to_string(),
        activity(
            "Practice and compete in inter-school basketball games",
            "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
            15,
            &["james@mergington.edu"],
        ),
    );
    activities.insert(
        "Soccer Club".to_string(),
        activity(
            "Train and play friendly soccer matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore painting, drawing and sculpture",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Act, direct and stage the school plays",
            "Thursdays, 3:30 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "henry@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["ava@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        activity(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "liam@mergington.edu"],
        ),
    );
    activities
}
