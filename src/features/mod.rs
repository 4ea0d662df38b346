pub mod review_quality_check;
