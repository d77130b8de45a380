use super::{exit_status::ExitStatus, run::RunResult};

pub fn exit_status_from_result(result: &RunResult) -> ExitStatus {
    if result.failure_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
