mod upload_form_test;
