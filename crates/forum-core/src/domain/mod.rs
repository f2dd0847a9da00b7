//! Domain entities - the core business objects.

mod comment;
mod post;
mod user;
mod views;
mod vote;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use user::{NewUser, User, UserChanges, UserInsert, UserPatch};
pub use views::{AuthorView, CommentView, PostView, PostVoters, UserVotes, VoterView};
pub use vote::Vote;
