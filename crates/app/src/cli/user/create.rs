use clap::Args;
use storefront_app::{
    auth::{API_TOKEN_PREFIX, generate_token, hash_token, is_well_formed},
    database::{self, DEFAULT_MAX_CONNECTIONS, Db},
    domain::users::{
        PgUsersService, UsersService,
        data::NewUser,
        records::{Role, UserUuid},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// User display name
    #[arg(long)]
    name: String,

    /// Access level: CUSTOMER or ADMIN
    #[arg(long, default_value = "CUSTOMER")]
    role: Role,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional raw API token; generated when omitted
    #[arg(long)]
    token: Option<String>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgUsersService::new(Db::new(pool));
    let raw_token = args.token.unwrap_or_else(generate_token);

    if !is_well_formed(&raw_token) {
        return Err(format!("token must be {API_TOKEN_PREFIX}_ followed by hex digits"));
    }

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: args.name,
            role: args.role,
            token_uuid: Uuid::now_v7(),
            token_hash: hash_token(&raw_token),
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);
    println!("role: {}", user.role);
    println!("api_token: {raw_token}");
    println!("store this token now; it is only shown once");

    Ok(())
}
