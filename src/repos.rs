use serde::{Deserialize, Serialize};

use crate::{de::null_as_default, SimpleUser};

/// The compact repository representation embedded in events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleRepo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// `owner/name`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// A repository, as returned by the repository endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repo {
    #[serde(flatten)]
    pub repo: SimpleRepo,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    pub description: Option<String>,
    pub owner: Option<SimpleUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fork: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub clone_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub git_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ssh_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub svn_url: String,
    pub mirror_url: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub forks_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub watchers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub watchers_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    /// Older API versions call it `master_branch`.
    #[serde(alias = "master_branch", deserialize_with = "null_as_default")]
    pub default_branch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub open_issues: u64,
    pub pushed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// A git commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub author: Option<CommitAuthor>,
    pub committer: Option<CommitAuthor>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub tree: Option<Tree>,
    #[serde(deserialize_with = "null_as_default")]
    pub parents: Vec<Tree>,
    /// Whether the commit is new to the repository (push payloads only).
    #[serde(deserialize_with = "null_as_default")]
    pub distinct: bool,
}

/// Git identity attached to a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Reference to a git tree or commit object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tree {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sha: String,
}

#[cfg(test)]
mod tests {
    use super::Repo;

    #[test]
    fn parses_repo_with_owner() {
        let repo: Repo = serde_json::from_str(
            r#"
              {
                "id": 10675738,
                "name": "go-github-client",
                "full_name": "plouc/go-github-client",
                "owner": { "login": "plouc", "id": 501642 },
                "private": false,
                "html_url": "https://github.com/plouc/go-github-client",
                "description": null,
                "fork": false,
                "url": "https://api.github.com/repos/plouc/go-github-client",
                "language": "Go",
                "forks_count": 2,
                "watchers_count": 5,
                "master_branch": "master",
                "open_issues": 1,
                "created_at": "2013-06-13T21:03:25Z",
                "updated_at": "2013-06-16T01:07:00Z",
                "pushed_at": "2013-06-16T01:06:59Z"
              }
            "#,
        )
        .unwrap();

        assert_eq!(repo.repo.id, 10675738);
        assert_eq!(repo.repo.name, "go-github-client");
        assert_eq!(repo.full_name, "plouc/go-github-client");
        assert_eq!(repo.owner.unwrap().login, "plouc");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language.as_deref(), Some("Go"));
        assert_eq!(repo.default_branch, "master");
        assert_eq!(repo.forks_count, 2);
    }
}
