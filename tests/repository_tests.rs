//! 仓库层单元测试

use movie_catalog::models::{movie::*, user::SignupRequest};
use movie_catalog::repository::{CommentRepository, MovieRepository, RatingRepository, UserRepository};
use uuid::Uuid;

mod common;
use common::{create_test_movie, create_test_user, setup_test_db};

fn sample_movie_request(title: &str) -> CreateMovieRequest {
    CreateMovieRequest {
        title: title.to_string(),
        release_date: "1982-06-25T00:00:00Z".parse().unwrap(),
        genre: "Science Fiction".to_string(),
        director: "Ridley Scott".to_string(),
        synopsis: None,
        runtime_minutes: Some(117),
        language: Some("English".to_string()),
    }
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_user_repository_create_and_find() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let user_repo = UserRepository::new(pool.clone());

    let req = SignupRequest {
        username: "repo_user".to_string(),
        password: "unused-here-123".to_string(),
        email: "repo@example.com".to_string(),
        first_name: "Repo".to_string(),
        last_name: "User".to_string(),
    };

    let created = user_repo.create(&req, "$argon2id$fake$digest").await.unwrap();
    assert_eq!(created.username, "repo_user");

    let by_name = user_repo
        .find_by_username("repo_user")
        .await
        .unwrap()
        .expect("User not found by username");
    assert_eq!(by_name.id, created.id);

    let by_id = user_repo
        .find_by_id(&created.id)
        .await
        .unwrap()
        .expect("User not found by id");
    assert_eq!(by_id.username, "repo_user");

    // 不存在的用户返回 None 而不是错误
    assert!(user_repo.find_by_username("nobody").await.unwrap().is_none());
    assert!(user_repo.find_by_id(&Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_movie_repository_crud_cycle() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let owner = create_test_user(&pool, "owner", "pw1-long-enough", "owner@example.com")
        .await
        .unwrap();
    let movie_repo = MovieRepository::new(pool.clone());

    let movie = movie_repo
        .create(&sample_movie_request("Blade Runner"), owner)
        .await
        .unwrap();
    assert_eq!(movie.user_id, owner);

    let found = movie_repo.find_by_id(&movie.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Blade Runner");

    let update = UpdateMovieRequest {
        title: "Blade Runner (Final Cut)".to_string(),
        release_date: movie.release_date,
        genre: movie.genre.clone(),
        director: movie.director.clone(),
        synopsis: Some("Revised synopsis".to_string()),
        runtime_minutes: movie.runtime_minutes,
        language: movie.language.clone(),
    };

    let updated = movie_repo.update(movie.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.title, "Blade Runner (Final Cut)");
    // owner 不随更新改变
    assert_eq!(updated.user_id, owner);

    // 更新不存在的电影返回 None
    assert!(movie_repo.update(Uuid::new_v4(), &update).await.unwrap().is_none());

    assert!(movie_repo.delete(movie.id).await.unwrap());
    assert!(movie_repo.find_by_id(&movie.id).await.unwrap().is_none());
    assert!(!movie_repo.delete(movie.id).await.unwrap());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_movie_repository_list_ordering() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let owner = create_test_user(&pool, "owner", "pw1-long-enough", "owner@example.com")
        .await
        .unwrap();

    create_test_movie(&pool, owner, "First").await.unwrap();
    create_test_movie(&pool, owner, "Second").await.unwrap();
    create_test_movie(&pool, owner, "Third").await.unwrap();

    let movie_repo = MovieRepository::new(pool);

    let page = movie_repo.list(2, 0).await.unwrap();
    assert_eq!(page.len(), 2);

    let rest = movie_repo.list(10, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_rating_repository_create_list_delete() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let owner = create_test_user(&pool, "owner", "pw1-long-enough", "owner@example.com")
        .await
        .unwrap();
    let movie_id = create_test_movie(&pool, owner, "Rated Movie").await.unwrap();

    let rating_repo = RatingRepository::new(pool);

    let rating = rating_repo.create(movie_id, owner, 7.5).await.unwrap();
    assert_eq!(rating.movie_id, movie_id);
    assert_eq!(rating.rating, 7.5);

    let ratings = rating_repo.list_for_movie(movie_id).await.unwrap();
    assert_eq!(ratings.len(), 1);

    assert!(rating_repo.delete(rating.id).await.unwrap());
    assert!(rating_repo.find_by_id(&rating.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_comment_repository_tree_and_cascade() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let owner = create_test_user(&pool, "owner", "pw1-long-enough", "owner@example.com")
        .await
        .unwrap();
    let movie_id = create_test_movie(&pool, owner, "Discussed Movie").await.unwrap();

    let comment_repo = CommentRepository::new(pool);

    let root = comment_repo
        .create(movie_id, owner, "Root comment", None)
        .await
        .unwrap();
    let reply = comment_repo
        .create(movie_id, owner, "A reply", Some(root.id))
        .await
        .unwrap();
    assert_eq!(reply.parent_id, Some(root.id));

    // 顶层列表只含根评论
    let top_level = comment_repo.list_top_level(movie_id).await.unwrap();
    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0].id, root.id);

    let replies = comment_repo.list_replies(root.id).await.unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].id, reply.id);

    // 删除根评论时回复级联删除
    assert!(comment_repo.delete(root.id).await.unwrap());
    assert!(comment_repo.find_by_id(&reply.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_deleting_movie_cascades_ratings_and_comments() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let owner = create_test_user(&pool, "owner", "pw1-long-enough", "owner@example.com")
        .await
        .unwrap();
    let movie_id = create_test_movie(&pool, owner, "Doomed Movie").await.unwrap();

    let rating_repo = RatingRepository::new(pool.clone());
    let comment_repo = CommentRepository::new(pool.clone());
    let movie_repo = MovieRepository::new(pool);

    let rating = rating_repo.create(movie_id, owner, 5.0).await.unwrap();
    let comment = comment_repo
        .create(movie_id, owner, "Soon to vanish", None)
        .await
        .unwrap();

    assert!(movie_repo.delete(movie_id).await.unwrap());

    assert!(rating_repo.find_by_id(&rating.id).await.unwrap().is_none());
    assert!(comment_repo.find_by_id(&comment.id).await.unwrap().is_none());
}
