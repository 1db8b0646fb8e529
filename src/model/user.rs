use serenity::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub bot: bool,
}

impl From<&serenity::model::user::User> for User {
    fn from(user: &serenity::model::user::User) -> User {
        User {
            id: user.id,
            name: user.name.clone(),
            bot: user.bot,
        }
    }
}
