//! Scenario tests exercising a mesh end to end
