//! End-to-end exercise of the state engine over mock collaborators:
//! content publishing, the club membership gate, the payment flow, the
//! quiz, and navigation.

use std::sync::Arc;
use tokio::sync::Mutex;

use artontok::adapters::ai::MockKeywordService;
use artontok::adapters::inquiry::MockInquirySubmitter;
use artontok::adapters::payment::MockPaymentGateway;
use artontok::adapters::storage::InMemoryBlobStore;
use artontok::application::handlers::content::PublishArticleHandler;
use artontok::application::handlers::membership::JoinClubHandler;
use artontok::application::handlers::quiz::{ConsultationContact, RequestConsultationHandler};
use artontok::domain::content::{ArticleCategory, ArticleDraft, ContentRepository};
use artontok::domain::membership::{
    ArticleAccess, AttemptResolution, MembershipOffer, PaymentMethod, PaymentOrchestrator,
};
use artontok::domain::navigation::{View, ViewRouter};
use artontok::domain::quiz::{QuestionId, QuizEngine};
use artontok::ports::BlobStore;

#[tokio::test]
async fn published_club_report_is_gated_until_payment_succeeds() {
    let store = Arc::new(InMemoryBlobStore::new());
    let repository = Arc::new(Mutex::new(
        ContentRepository::load_or_default(store.clone()).await,
    ));

    // operator publishes a club report from the dashboard
    let publish = PublishArticleHandler::new(
        repository.clone(),
        Arc::new(MockKeywordService::with_keywords(&["재테크", "클럽"])),
    );
    let report = publish
        .handle(ArticleDraft {
            title: "6월 아트테크 리포트".to_string(),
            content: "회원 전용 분석".to_string(),
            category: ArticleCategory::Club,
            image_url: String::new(),
        })
        .await
        .unwrap();

    // a visitor clicks it: the join flow opens instead of the article
    let mut orchestrator = PaymentOrchestrator::new(MembershipOffer::default());
    assert_eq!(
        orchestrator.open_article(&report),
        ArticleAccess::JoinFlowOpened
    );

    // first attempt fails at the gateway, second succeeds
    let gateway = Arc::new(
        MockPaymentGateway::new()
            .then_failure("PG_ERROR", "잔액 부족")
            .then_success(),
    );
    let join = JoinClubHandler::new(gateway.clone());

    orchestrator.select_method(PaymentMethod::KakaoPay).unwrap();
    let first = join.handle(&mut orchestrator).await.unwrap();
    assert_eq!(
        first,
        AttemptResolution::Failed {
            message: "잔액 부족".to_string()
        }
    );
    assert!(!orchestrator.vip().is_vip());

    let second = join.handle(&mut orchestrator).await.unwrap();
    assert_eq!(second, AttemptResolution::Succeeded);

    // the same article now opens
    assert_eq!(orchestrator.open_article(&report), ArticleAccess::Granted);

    // both gateway requests were easy-pay with agreeing providers
    for request in gateway.requests() {
        assert_eq!(request.pg_provider, "PG_PROVIDER_KAKAOPAY");
        assert_eq!(
            request.easy_pay.as_ref().unwrap().provider,
            "EASY_PAY_PROVIDER_KAKAOPAY"
        );
    }
}

#[tokio::test]
async fn repository_state_survives_a_reload() {
    let store = Arc::new(InMemoryBlobStore::new());
    {
        let mut repo = ContentRepository::load_or_default(store.clone()).await;
        repo.publish(
            ArticleDraft {
                title: "영속성 확인".to_string(),
                content: "본문".to_string(),
                category: ArticleCategory::Art,
                image_url: String::new(),
            },
            &MockKeywordService::with_keywords(&["x"]),
        )
        .await
        .unwrap();
    }

    // a second session over the same store sees the published article
    let repo = ContentRepository::load_or_default(store).await;
    assert_eq!(repo.articles()[0].title, "영속성 확인");
    assert_eq!(repo.articles().len(), 4);
}

#[tokio::test]
async fn quiz_result_flows_into_the_consultation_inquiry() {
    let mut engine = QuizEngine::new();
    engine.begin().unwrap();
    engine
        .answer(QuestionId::Q1, "따뜻하고 아늑한 클래식 거실")
        .unwrap();
    engine.answer(QuestionId::Q2, "space").unwrap();
    engine.answer(QuestionId::Q3, "rookie").unwrap();
    assert_eq!(engine.result().unwrap().coach_name, "Elena Park");
    engine.open_form().unwrap();

    let submitter = Arc::new(MockInquirySubmitter::new());
    let handler = RequestConsultationHandler::new(submitter.clone());
    handler
        .handle(
            &mut engine,
            ConsultationContact {
                name: "김컬렉터".to_string(),
                phone: "010-1234-5678".to_string(),
                email: "collector@example.com".to_string(),
                memo: "공간 큐레이팅 문의".to_string(),
            },
        )
        .await
        .unwrap();

    let sent = &submitter.submissions()[0];
    assert_eq!(sent.extra["result"], "프라이빗 공간 큐레이팅");
    assert_eq!(sent.extra["q2"], "space");
    assert!(sent.subject.contains("김컬렉터"));
}

#[tokio::test]
async fn corrupt_store_never_blocks_startup() {
    let store = Arc::new(InMemoryBlobStore::new());
    store
        .write(artontok::ports::StoreSlot::Articles, "<<garbage>>")
        .await
        .unwrap();
    store
        .write(artontok::ports::StoreSlot::Settings, "[1,2,3]")
        .await
        .unwrap();

    let repo = ContentRepository::load_or_default(store).await;
    assert_eq!(repo.articles().len(), 3);
    assert_eq!(repo.settings().site_name, "아트 온 톡 (Art On Tok)");
}

#[test]
fn admin_menu_entry_appears_only_after_a_visit() {
    let mut router = ViewRouter::new();
    assert!(!router.menu_items().contains(&View::Admin));

    router.navigate(View::Admin);
    router.navigate(View::Blog);
    assert!(router.menu_items().contains(&View::Admin));
    assert_eq!(router.current(), View::Blog);
}
