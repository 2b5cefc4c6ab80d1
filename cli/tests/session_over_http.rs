//! `Session` over reqwest against the live mock server.

use roster_cli::ReqwestTransport;
use roster_core::{
    ActionError, ClientConfig, Field, NoticeKind, Notifier, Session, TableView,
};

#[derive(Default)]
struct Dialogs {
    answer: bool,
    notices: Vec<(NoticeKind, String)>,
}

impl Notifier for Dialogs {
    fn confirm(&mut self, _question: &str) -> bool {
        self.answer
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push((kind, message.to_string()));
    }
}

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}/api")
}

#[tokio::test(flavor = "multi_thread")]
async fn create_edit_delete_round_trip() {
    let config = ClientConfig::new(start_server().await);
    let mut session = Session::new(&config, ReqwestTransport::new(), Dialogs::default());

    session.mount().await;
    assert_eq!(session.table().view(), TableView::Empty);

    let form = session.form_mut();
    form.set(Field::Name, "Al");
    form.set(Field::Salary, "9.99");
    form.set(Field::City, "NY");
    let created = session.submit_form().await.unwrap();
    assert_eq!(session.table().summary(), "1 employee found");

    session.open_edit(created.id).unwrap().set(Field::City, "Boston");
    let saved = session.save_edit().await.unwrap();
    assert_eq!(saved.city, "Boston");
    assert_eq!(session.table().row(created.id).unwrap().city, "Boston");

    assert_eq!(session.delete(created.id).await, Err(ActionError::Declined));
    assert!(session.table().row(created.id).is_some());

    session.notifier_mut().answer = true;
    session.delete(created.id).await.unwrap();
    assert_eq!(session.table().view(), TableView::Empty);

    let kinds: Vec<_> = session.notifier().notices.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, [NoticeKind::Success; 3]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend_fails_the_load() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}/api"));
    let mut session = Session::new(&config, ReqwestTransport::new(), Dialogs::default());
    session.mount().await;

    assert!(matches!(session.table().view(), TableView::Failed { .. }));
}
