use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Comment::Table)
                .col(
                    ColumnDef::new(Comment::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Comment::PostId).integer().not_null())
                .col(ColumnDef::new(Comment::UserId).integer().not_null())
                .col(ColumnDef::new(Comment::ParentCommentId).integer().null())
                .col(ColumnDef::new(Comment::Content).string_len(500).not_null())
                .col(
                    ColumnDef::new(Comment::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Comment::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_post")
                        .from(Comment::Table, Comment::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_user")
                        .from(Comment::Table, Comment::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comment_parent")
                        .from(Comment::Table, Comment::ParentCommentId)
                        .to(Comment::Table, Comment::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_comment_post_id")
                .table(Comment::Table)
                .col(Comment::PostId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_comment_parent_id")
                .table(Comment::Table)
                .col(Comment::ParentCommentId)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Comment::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comment {
    Table,
    Id,
    PostId,
    UserId,
    ParentCommentId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
