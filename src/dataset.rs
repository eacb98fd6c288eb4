/// This module provides access to the weather ("play tennis") toy dataset
pub mod weather;
