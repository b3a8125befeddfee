mod home;
pub use home::{render_home, HomePage};

mod login;
pub use login::{render_login, render_login_result, LoginPage, LoginResultPage};

mod comments;
pub use comments::{render_comments, CommentsPage};

mod profile;
pub use profile::{render_profile, ProfilePage};

mod attacker;
pub use attacker::{render_attacker, AttackerPage};
