use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCommentRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxServiceRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSocialPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxHealthRepo {
    pub pool: PgPool,
}
