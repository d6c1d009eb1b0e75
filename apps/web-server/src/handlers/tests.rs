#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use gazette_core::domain::Post;
    use gazette_core::ports::{BaseRepository, PostRepository};
    use gazette_shared::PostForm;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! service {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn post_created_at(title: &str, seconds_ago: i64) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "content".to_string(),
            created_at: Utc::now() - Duration::seconds(seconds_ago),
        }
    }

    async fn body_string(res: actix_web::dev::ServiceResponse) -> String {
        let bytes = test::read_body(res).await;
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn listing_is_newest_first() {
        let state = AppState::in_memory();
        state.posts.insert(post_created_at("middle", 15)).await.unwrap();
        state.posts.insert(post_created_at("newest", 0)).await.unwrap();
        state.posts.insert(post_created_at("oldest", 30)).await.unwrap();

        let app = service!(state);
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = body_string(res).await;
        let newest = body.find("newest").unwrap();
        let middle = body.find("middle").unwrap();
        let oldest = body.find("oldest").unwrap();
        assert!(newest < middle && middle < oldest);
    }

    #[actix_web::test]
    async fn detail_shows_an_existing_post() {
        let state = AppState::in_memory();
        let post = Post::new("A title".into(), "The body text".into());
        let id = post.id;
        state.posts.insert(post).await.unwrap();

        let app = service!(state);
        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = body_string(res).await;
        assert!(body.contains("A title"));
        assert!(body.contains("The body text"));
    }

    #[actix_web::test]
    async fn detail_of_unknown_id_is_not_found() {
        let state = AppState::in_memory();

        let app = service!(state);
        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn valid_submission_persists_one_post_and_redirects_to_it() {
        let state = AppState::in_memory();

        let app = service!(state);
        let req = test::TestRequest::post()
            .uri("/posts/new")
            .set_form(PostForm {
                title: "Fresh".into(),
                content: "Just written".into(),
            })
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);

        let location = res
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let posts = state.posts.list_recent().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(location, format!("/posts/{}", posts[0].id));

        // The redirect target renders the new post
        let res = test::call_service(&app, test::TestRequest::get().uri(&location).to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_string(res).await.contains("Fresh"));
    }

    #[actix_web::test]
    async fn invalid_submission_persists_nothing_and_rerenders_the_form() {
        let state = AppState::in_memory();

        let app = service!(state);
        let req = test::TestRequest::post()
            .uri("/posts/new")
            .set_form(PostForm {
                title: "".into(),
                content: "Body without a title".into(),
            })
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = body_string(res).await;
        assert!(body.contains("Title must be between 1 and 200 characters."));
        // Submitted values survive the re-render
        assert!(body.contains("Body without a title"));

        assert!(state.posts.list_recent().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn identical_submissions_create_two_distinct_posts() {
        let state = AppState::in_memory();

        let app = service!(state);
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/posts/new")
                .set_form(PostForm {
                    title: "Twice".into(),
                    content: "Same data".into(),
                })
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER);
        }

        let posts = state.posts.list_recent().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_ne!(posts[0].id, posts[1].id);
    }

    #[actix_web::test]
    async fn empty_form_page_renders() {
        let state = AppState::in_memory();

        let app = service!(state);
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/posts/new").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_string(res).await.contains("form"));
    }
}
