use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Comma-separated user IDs; all users when absent
    #[serde(default, deserialize_with = "crate::model::query::comma_separated")]
    #[param(value_type = Option<String>, example = "1,2")]
    pub ids: Option<Vec<i32>>,
}
