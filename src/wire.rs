//! Request/response records for a transport boundary.
//!
//! A service layer deserializes a [`DistributeRequest`], calls
//! [`DistributeRequest::execute`], and serializes the
//! [`DistributeResponse`]. Maps are ordered so the serialized output is
//! deterministic.
//!
//! ```json
//! { "processes": [{"id": 0, "arrival_time": 0.0, "burst_time": 5.0, "priority": 1}],
//!   "num_processors": 1 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AllocationError;
use crate::models::{Allocation, Process, ProcessId, ProcessorIndex};
use crate::scheduler::Distributor;
use crate::validation::{
    validate_processor_count, validate_processor_limit, ValidationError, ValidationErrorKind,
};

/// Distribution request as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributeRequest {
    /// Processes to distribute.
    pub processes: Vec<Process>,
    /// Requested pool size. Signed so that negative counts survive
    /// deserialization and are rejected by validation.
    pub num_processors: i64,
}

/// Distribution result as returned to a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributeResponse {
    /// Queue per processor index, in execution order.
    pub processor_allocations: BTreeMap<ProcessorIndex, Vec<Process>>,
    /// Waiting time per process ID.
    pub waiting_times: BTreeMap<ProcessId, f64>,
    /// Turnaround time per process ID.
    pub turnaround_times: BTreeMap<ProcessId, f64>,
    /// Pool utilization in percent.
    pub utilization: f64,
}

impl DistributeRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, num_processors: i64) -> Self {
        Self {
            processes,
            num_processors,
        }
    }

    /// Runs the request with the default distributor.
    pub fn execute(&self) -> Result<DistributeResponse, AllocationError> {
        self.execute_with(&Distributor::new())
    }

    /// Runs the request with a configured distributor.
    pub fn execute_with(
        &self,
        distributor: &Distributor,
    ) -> Result<DistributeResponse, AllocationError> {
        validate_processor_count(self.num_processors)?;
        validate_processor_limit(self.num_processors, distributor.max_processors())?;
        let num_processors = usize::try_from(self.num_processors).map_err(|_| {
            AllocationError::from(vec![ValidationError::new(
                ValidationErrorKind::InvalidProcessorCount,
                format!(
                    "Processor count {} exceeds the addressable range",
                    self.num_processors
                ),
            )])
        })?;
        let allocation = distributor.distribute(&self.processes, num_processors)?;
        Ok(allocation.into())
    }
}

impl From<Allocation> for DistributeResponse {
    fn from(allocation: Allocation) -> Self {
        Self {
            processor_allocations: allocation
                .processor_allocations
                .into_iter()
                .enumerate()
                .collect(),
            waiting_times: allocation.waiting_times,
            turnaround_times: allocation.turnaround_times,
            utilization: allocation.utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": 0, "arrival_time": 0.0, "burst_time": 5.0, "priority": 1}
            ],
            "num_processors": 1
        }"#;
        let request: DistributeRequest = serde_json::from_str(json).unwrap();
        let response = request.execute().unwrap();

        assert_eq!(response.processor_allocations[&0].len(), 1);
        assert_eq!(response.waiting_times[&0], 0.0);
        assert_eq!(response.turnaround_times[&0], 5.0);
        assert_eq!(response.utilization, 100.0);
    }

    #[test]
    fn test_response_json_shape() {
        let request = DistributeRequest::new(
            vec![
                Process::new(0, 3.0).with_priority(5),
                Process::new(1, 3.0).with_priority(5),
            ],
            2,
        );
        let response = request.execute().unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["processor_allocations"]["0"][0]["id"], 0);
        assert_eq!(json["processor_allocations"]["1"][0]["id"], 1);
        assert_eq!(json["waiting_times"]["1"], 0.0);
        assert_eq!(json["turnaround_times"]["0"], 3.0);
        assert_eq!(json["utilization"], 100.0);

        let text = serde_json::to_string(&response).unwrap();
        let back: DistributeResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_empty_processors_listed() {
        let response = DistributeRequest::new(Vec::new(), 4).execute().unwrap();
        assert_eq!(response.processor_allocations.len(), 4);
        assert!(response.processor_allocations.values().all(Vec::is_empty));
        assert!(response.waiting_times.is_empty());
        assert_eq!(response.utilization, 0.0);
    }

    #[test]
    fn test_negative_processors_rejected() {
        let err = DistributeRequest::new(vec![Process::new(0, 1.0)], -2)
            .execute()
            .unwrap_err();
        assert_eq!(err.issues()[0].kind, ValidationErrorKind::InvalidProcessorCount);
    }

    #[test]
    fn test_oversized_processors_rejected() {
        let json = r#"{
            "processes": [
                {"id": 0, "arrival_time": 0.0, "burst_time": 1.0, "priority": 1}
            ],
            "num_processors": 9223372036854775807
        }"#;
        let request: DistributeRequest = serde_json::from_str(json).unwrap();
        let err = request.execute().unwrap_err();
        assert!(matches!(err, AllocationError::InvalidConfiguration { .. }));
        assert_eq!(err.issues()[0].kind, ValidationErrorKind::InvalidProcessorCount);

        let err = DistributeRequest::new(Vec::new(), 10_000_000_000)
            .execute()
            .unwrap_err();
        assert_eq!(err.issues()[0].kind, ValidationErrorKind::InvalidProcessorCount);
    }

    #[test]
    fn test_configured_limit_applies() {
        let distributor = Distributor::new().with_max_processors(8);
        let request = DistributeRequest::new(vec![Process::new(0, 1.0)], 9);
        assert!(request.execute_with(&distributor).is_err());
        assert!(request.execute().is_ok());
    }

    #[test]
    fn test_invalid_process_rejected() {
        let err = DistributeRequest::new(vec![Process::new(0, 0.0)], 2)
            .execute()
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
