/**
 * Command line front end for the activities API.
 *
 * The API location is read from `API_URL`, see `activities_client::Config`.
 */
use activities_client::{ActivitiesClient, Config, Error};
use std::env;

fn usage() -> ! {
    eprintln!("Usage: activities <command> [args...]");
    eprintln!("Commands:");
    eprintln!("  list                          - List all activities");
    eprintln!("  signup <activity> <email>     - Sign up for an activity");
    eprintln!("  unregister <activity> <email> - Withdraw from an activity");
    std::process::exit(1);
}

fn report(err: &Error) -> ! {
    match err.detail() {
        Some(detail) => eprintln!("Error: {detail}"),
        None => eprintln!("Error: {err}"),
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    mh_app::init_tracing();

    let config: Config = mh_app::load_config().unwrap_or_else(|err| {
        eprintln!("Error loading configuration: {err}");
        std::process::exit(1);
    });

    let client =
        ActivitiesClient::new(&config).unwrap_or_else(|err| report(&err));

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => {
            let activities = client
                .list_activities()
                .await
                .unwrap_or_else(|err| report(&err));

            for (name, activity) in &activities {
                println!("{name} ({})", activity.schedule);
                println!("  {}", activity.description);
                println!(
                    "  {} of {} spots left",
                    activity.spots_left(),
                    activity.max_participants
                );
                for participant in &activity.participants {
                    println!("  - {participant}");
                }
            }
        }
        ["signup", activity, email] => {
            let response = client
                .signup(activity, email)
                .await
                .unwrap_or_else(|err| report(&err));
            println!("{}", response.message);
        }
        ["unregister", activity, email] => {
            let response = client
                .unregister(activity, email)
                .await
                .unwrap_or_else(|err| report(&err));
            println!("{}", response.message);
        }
        _ => usage(),
    }
}
