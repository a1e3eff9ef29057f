use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Post::Table)
                .col(
                    ColumnDef::new(Post::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Post::UserId).integer().not_null())
                .col(ColumnDef::new(Post::Title).string_len(255).not_null())
                .col(ColumnDef::new(Post::Content).text().not_null())
                .col(ColumnDef::new(Post::Rating).small_integer().null())
                .col(ColumnDef::new(Post::Isbn).string_len(20).null())
                .col(ColumnDef::new(Post::BookTitle).string_len(255).null())
                .col(ColumnDef::new(Post::BookAuthor).string_len(255).null())
                .col(
                    ColumnDef::new(Post::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Post::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_user")
                        .from(Post::Table, Post::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_post_user_id")
                .table(Post::Table)
                .col(Post::UserId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(PostImage::Table)
                .col(
                    ColumnDef::new(PostImage::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(PostImage::PostId).integer().not_null())
                .col(ColumnDef::new(PostImage::FilePath).string().not_null())
                .col(
                    ColumnDef::new(PostImage::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_image_post")
                        .from(PostImage::Table, PostImage::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(PostHashtag::Table)
                .col(
                    ColumnDef::new(PostHashtag::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(PostHashtag::PostId).integer().not_null())
                .col(ColumnDef::new(PostHashtag::Tag).string_len(30).not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_hashtag_post")
                        .from(PostHashtag::Table, PostHashtag::PostId)
                        .to(Post::Table, Post::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_post_hashtag_tag")
                .table(PostHashtag::Table)
                .col(PostHashtag::Tag)
                .to_owned(),
        )
        .await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PostHashtag::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(PostImage::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Post::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    UserId,
    Title,
    Content,
    Rating,
    Isbn,
    BookTitle,
    BookAuthor,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PostImage {
    Table,
    Id,
    PostId,
    FilePath,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PostHashtag {
    Table,
    Id,
    PostId,
    Tag,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
