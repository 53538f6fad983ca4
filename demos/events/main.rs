use clap::{CommandFactory, Parser};

const FUNCTIONS: &str = "available functions:
  all
  repo                (-r owner/name)
  repo_issues         (-r owner/name)
  repo_network        (-r owner/name)
  user_received       (-u user)
  user_received_pub   (-u user)
  user_performed      (-u user)
  user_performed_pub  (-u user)
  org                 (-u user -o org)
  org_public          (-o org)";

/// Print GitHub activity events, one per line.
#[derive(Parser)]
#[command(after_help = FUNCTIONS)]
struct Args {
    /// Method used to retrieve events.
    #[arg(short, long)]
    function: Option<String>,

    /// User name. Events performed by this user are rendered as "you".
    #[arg(short, long)]
    user: Option<String>,

    /// Repository, as `owner/name`.
    #[arg(short, long)]
    repo: Option<String>,

    /// Organization.
    #[arg(short, long)]
    org: Option<String>,
}

pub fn main() -> github_client::Result<()> {
    // Configure env_logger to see client logs.
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("github_client=warn"))
        .init();

    let args = Args::parse();
    let client = github_client::ClientConfig::new().to_client();

    let user = args.user.as_deref();
    let repo = args.repo.as_deref().and_then(|repo| repo.split_once('/'));
    let org = args.org.as_deref();

    let events = match (args.function.as_deref(), user, repo, org) {
        (Some("all"), _, _, _) => client.events()?,
        (Some("repo"), _, Some((owner, name)), _) => client.repo_events(owner, name)?,
        (Some("repo_issues"), _, Some((owner, name)), _) => {
            client.repo_issue_events(owner, name)?
        }
        (Some("repo_network"), _, Some((owner, name)), _) => client.network_events(owner, name)?,
        (Some("user_received"), Some(user), _, _) => client.user_received_events(user)?,
        (Some("user_received_pub"), Some(user), _, _) => {
            client.user_received_public_events(user)?
        }
        (Some("user_performed"), Some(user), _, _) => client.user_performed_events(user)?,
        (Some("user_performed_pub"), Some(user), _, _) => {
            client.user_performed_public_events(user)?
        }
        (Some("org"), Some(user), _, Some(org)) => client.org_events(user, org)?,
        (Some("org_public"), _, _, Some(org)) => client.org_public_events(org)?,
        (Some(function), _, _, _) => {
            println!("Unknown function '{function}' or missing argument.\n");
            print_usage();
            return Ok(());
        }
        (None, _, _, _) => {
            print_usage();
            return Ok(());
        }
    };

    let viewer = user.unwrap_or_default();
    for event in &events {
        println!(
            "{} > {}",
            event.created_at.format("%a %d %b %H:%M"),
            event.summary(viewer)
        );
    }

    let rate_limit = client.rate_limit();
    log::info!(target: "github_client",
               remaining = rate_limit.remaining,
               limit = rate_limit.limit;
               "rate limit");

    Ok(())
}

fn print_usage() {
    // Nothing useful to do if stdout is closed.
    let _ = Args::command().print_help();
}
