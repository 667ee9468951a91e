mod proptest_fsm;
mod supersede;
