pub use mailer::*;

mod mailer;
