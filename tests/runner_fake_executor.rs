// tests/runner_fake_executor.rs

use std::error::Error;
use std::fs;
use std::path::Path;

use bootstrap_runner::config::BootstrapPlan;
use bootstrap_runner::errors::BootstrapError;
use bootstrap_runner::runner::Runner;
use bootstrap_runner_test_utils::builders::{GroupBuilder, PlanBuilder};
use bootstrap_runner_test_utils::fake_executor::RecordingExecutor;
use bootstrap_runner_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn project_root(subdirs: &[&str]) -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    for dir in subdirs {
        fs::create_dir_all(root.path().join(dir)).unwrap();
    }
    root
}

fn console(runner: &Runner<RecordingExecutor, Vec<u8>>) -> String {
    String::from_utf8_lossy(runner.output()).into_owned()
}

fn new_runner(root: &Path, executor: RecordingExecutor) -> Runner<RecordingExecutor, Vec<u8>> {
    Runner::new(root.canonicalize().unwrap(), executor, Vec::new())
}

#[tokio::test]
async fn all_groups_succeed_and_notices_follow_group_order() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["backend", "frontend"]);
        let plan = BootstrapPlan::builtin();
        let mut runner = new_runner(root.path(), RecordingExecutor::new());

        let report = runner.run(&plan).await?;

        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.commands_run(), 5);
        assert_eq!(runner.executor().commands().len(), 5);

        let out = console(&runner);
        let expected = "\
Starting project setup...

Setting up Backend Setup...
Running: npm install
Running: echo 'MONGO_URI=<your_mongodb_connection_string>' > .env
Running: echo 'JWT_SECRET=your_jwt_secret' >> .env
Backend Setup setup complete!

Setting up Frontend Setup...
Running: npm install
Running: echo 'REACT_APP_API_URL=http://localhost:5000/api' > .env
Frontend Setup setup complete!

Setup complete! You can now start your project.
";
        assert_eq!(out, expected);
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn backend_install_failure_never_starts_frontend() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["backend", "frontend"]);
        let plan = BootstrapPlan::builtin();
        let executor = RecordingExecutor::new().fail_with("npm install", 1);
        let mut runner = new_runner(root.path(), executor);

        let err = runner.run(&plan).await.unwrap_err();

        match &err {
            BootstrapError::CommandFailed { command, code } => {
                assert_eq!(command, "npm install");
                assert_eq!(*code, Some(1));
            }
            other => panic!("Expected CommandFailed, got: {:?}", other),
        }
        assert_eq!(err.failed_command(), Some("npm install"));

        // Only the very first command was attempted.
        assert_eq!(runner.executor().commands(), vec!["npm install".to_string()]);

        let out = console(&runner);
        assert!(out.contains("Setting up Backend Setup..."));
        assert!(!out.contains("Frontend"));
        assert!(!out.contains("setup complete!"));
        assert!(!out.contains("Setup complete!"));
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn failure_mid_group_skips_rest_of_group_and_later_groups() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["one", "two"]);
        let plan = PlanBuilder::new()
            .with_group(
                GroupBuilder::new("one", "one")
                    .command("a")
                    .command("b")
                    .command("c")
                    .build(),
            )
            .with_group(GroupBuilder::new("two", "two").command("d").build())
            .build();
        let executor = RecordingExecutor::new().fail_with("b", 2);
        let mut runner = new_runner(root.path(), executor);

        let err = runner.run(&plan).await.unwrap_err();

        assert!(matches!(
            err,
            BootstrapError::CommandFailed { code: Some(2), .. }
        ));
        assert_eq!(
            runner.executor().commands(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(console(&runner).ends_with("Running: b\n"));
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn launch_failure_is_fatal_and_names_the_command() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["backend", "frontend"]);
        let plan = BootstrapPlan::builtin();
        let executor = RecordingExecutor::new().fail_to_launch("npm install");
        let mut runner = new_runner(root.path(), executor);

        let err = runner.run(&plan).await.unwrap_err();

        assert!(matches!(err, BootstrapError::CommandLaunch { .. }));
        assert_eq!(err.failed_command(), Some("npm install"));
        assert_eq!(runner.executor().executed().len(), 1);
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn missing_group_directory_stops_before_any_command() -> TestResult {
    with_timeout(async {
        init_tracing();

        // `frontend` is never created.
        let root = project_root(&["backend"]);
        let plan = BootstrapPlan::builtin();
        let mut runner = new_runner(root.path(), RecordingExecutor::new());

        let err = runner.run(&plan).await.unwrap_err();

        match err {
            BootstrapError::MissingDirectory { group, path } => {
                assert_eq!(group, "Frontend Setup");
                assert!(path.ends_with("frontend"));
            }
            other => panic!("Expected MissingDirectory, got: {:?}", other),
        }
        // Backend still ran completely before the frontend check failed.
        assert_eq!(runner.executor().commands().len(), 3);
        assert!(console(&runner).contains("Backend Setup setup complete!"));
        assert!(console(&runner).ends_with("Setting up Frontend Setup...\n"));
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn commands_receive_absolute_group_directories() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["services/api"]);
        let elsewhere = project_root(&["shared"]);
        let shared = elsewhere.path().join("shared").canonicalize()?;

        let plan = PlanBuilder::new()
            .with_group(GroupBuilder::new("api", "services/api").command("make").build())
            .with_group(
                GroupBuilder::new("shared", shared.clone())
                    .command("make")
                    .build(),
            )
            .build();
        let mut runner = new_runner(root.path(), RecordingExecutor::new());

        let report = runner.run(&plan).await?;

        let dirs: Vec<_> = runner
            .executor()
            .executed()
            .iter()
            .map(|e| e.dir.clone())
            .collect();
        let api = runner.root().join("services/api");
        assert_eq!(dirs, vec![api.clone(), shared.clone()]);
        assert!(dirs.iter().all(|d| d.is_absolute()));
        assert_eq!(report.groups[0].dir, api);
        assert_eq!(report.groups[1].dir, shared);
        TestResult::Ok(())
    })
    .await
}

#[tokio::test]
async fn group_without_commands_is_still_announced() -> TestResult {
    with_timeout(async {
        init_tracing();

        let root = project_root(&["docs"]);
        let plan = PlanBuilder::new()
            .with_group(GroupBuilder::new("docs", "docs").build())
            .build();
        let mut runner = new_runner(root.path(), RecordingExecutor::new());

        let report = runner.run(&plan).await?;

        assert_eq!(report.commands_run(), 0);
        let out = console(&runner);
        assert!(out.contains("Setting up docs...\ndocs setup complete!\n"));
        assert!(out.ends_with("Setup complete! You can now start your project.\n"));
        TestResult::Ok(())
    })
    .await
}
