
use holonet_test_utils::prelude::*;
